pub mod pair;
pub mod lexicon;
pub mod strictness;

pub use pair::*;
pub use lexicon::*;
pub use strictness::*;

pub mod normalize;
pub mod report;
pub mod segment;
pub mod sentence_match;
pub mod similarity;
pub mod window;

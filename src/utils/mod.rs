pub mod fold;
pub mod whole_word;

pub mod flashcard;
pub mod grammar;
pub mod word_list;

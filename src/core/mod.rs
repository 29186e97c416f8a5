pub mod conversion_table;
pub mod kana;
pub mod normalizer;
pub mod normalizer_fsm;

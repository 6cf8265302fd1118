mod bit_iter_tests;
mod word_ops_tests;

pub mod a001_rug;

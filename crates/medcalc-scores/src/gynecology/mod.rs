pub mod fetal_bpp;

pub mod animate;

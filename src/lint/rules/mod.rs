pub mod instantiable;

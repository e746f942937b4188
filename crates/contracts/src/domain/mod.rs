pub mod separacion_ecd;

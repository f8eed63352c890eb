pub mod kuaishou;

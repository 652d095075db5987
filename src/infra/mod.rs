pub mod tcmb;

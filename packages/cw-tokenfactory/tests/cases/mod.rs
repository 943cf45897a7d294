mod force_transfer;
mod genesis;
mod queries;

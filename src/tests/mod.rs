mod not_found;
mod owners;

mod critical_system;
mod department;
mod role;
mod user;

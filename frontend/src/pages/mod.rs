pub mod wheel_of_fortune;

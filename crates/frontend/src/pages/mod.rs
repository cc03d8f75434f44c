pub mod travel_console;

pub mod session_cli_controller;

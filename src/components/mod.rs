pub mod tool_button;

// Message styles and prompts
pub mod demo;

// Named color listing
pub mod colors;

// Sharing one UI between threads
pub mod threads;

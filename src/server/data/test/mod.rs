mod client;
mod guest;

pub mod inference_server;

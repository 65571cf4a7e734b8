mod http_test;
mod session_test;

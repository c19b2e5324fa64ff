pub mod assemble;
pub mod codec;
pub mod dispatch;
pub mod extract;
pub mod resolve;

mod channel_message_sink;
mod json_lines_message_sink;

pub use channel_message_sink::ChannelMessageSink;
pub use json_lines_message_sink::JsonLinesMessageSink;

/// Marker for intents: key presses translated into screen actions, or
/// notifications from the counter holder.
pub trait Intent: Send + 'static {}

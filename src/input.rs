use strum_macros::EnumIter;

// a discrete player command
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl Intent {
    // default arrow key bindings, by `KeyboardEvent.key` name
    pub fn from_key(key: &str) -> Option<Intent> {
        match key {
            "ArrowLeft" => Some(Intent::MoveLeft),
            "ArrowRight" => Some(Intent::MoveRight),
            "ArrowDown" => Some(Intent::SoftDrop),
            "ArrowUp" => Some(Intent::Rotate),
            _ => None,
        }
    }

    pub fn default_key(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "ArrowLeft",
            Intent::MoveRight => "ArrowRight",
            Intent::SoftDrop => "ArrowDown",
            Intent::Rotate => "ArrowUp",
        }
    }
}

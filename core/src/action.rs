/// Pointer input gathered for one tick, in puzzle space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputBatch {
    pub pointer: (f32, f32),
    pub pressed: bool,
    pub moves: Vec<(f32, f32)>,
    pub released: bool,
}

impl InputBatch {
    pub fn hover(pointer: (f32, f32)) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    pub fn press(pointer: (f32, f32)) -> Self {
        Self {
            pointer,
            pressed: true,
            ..Self::default()
        }
    }

    pub fn release(pointer: (f32, f32)) -> Self {
        Self {
            pointer,
            released: true,
            ..Self::default()
        }
    }

    pub fn with_moves(mut self, moves: Vec<(f32, f32)>) -> Self {
        self.moves = moves;
        self
    }
}

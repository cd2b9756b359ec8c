use alexa::PowerState;

/// Power state of the simulated switch. Lives as long as its owner and is
/// never persisted.
#[derive(Debug, Default)]
pub struct PowerStateCell {
    state: PowerState,
}

impl PowerStateCell {
    pub fn new() -> PowerStateCell {
        PowerStateCell::default()
    }

    pub fn read(&self) -> PowerState {
        self.state
    }

    pub fn toggle(&mut self) -> PowerState {
        self.state = self.state.toggled();
        self.state
    }
}

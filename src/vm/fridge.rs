/// The fridge's operating mode.
///
/// The mode is a writable fridge register; programs switch it with
/// `set_mode`. Only these three modes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Regular cooling.
    #[default]
    Normal,
    /// Reduced energy consumption.
    Eco,
    /// Maximum cooling power.
    Turbo,
}

impl Mode {
    /// Returns the mode named by `name` (`NORMAL`, `ECO`, `TURBO`), if any.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NORMAL" => Some(Self::Normal),
            "ECO" => Some(Self::Eco),
            "TURBO" => Some(Self::Turbo),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Normal => "NORMAL",
            Self::Eco => "ECO",
            Self::Turbo => "TURBO",
        };
        write!(f, "{name}")
    }
}

/// The writable state of the simulated fridge.
///
/// Holds the two fridge registers (temperature and mode) and the ordered
/// list of stored items.
#[derive(Debug, Clone, PartialEq)]
pub struct Fridge {
    /// Internal temperature in degrees Celsius.
    pub temp:  i64,
    /// Current operating mode.
    pub mode:  Mode,
    /// Stored items, in insertion order.
    pub items: Vec<String>,
}

impl Default for Fridge {
    fn default() -> Self {
        Self { temp:  4,
               mode:  Mode::Normal,
               items: Vec::new(), }
    }
}

impl Fridge {
    /// Adds an item to the fridge.
    pub fn add_item(&mut self, item: &str) {
        self.items.push(item.to_string());
    }

    /// Removes the first occurrence of an item from the fridge.
    ///
    /// # Returns
    /// `true` if the item was stored, `false` if it was not. Removing a
    /// missing item is not an error.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(index) = self.items.iter().position(|stored| stored == item) {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns `true` if the fridge currently stores the item.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|stored| stored == item)
    }
}

/// The fridge's read-only sensor block.
///
/// Programs can read sensors but never write them; tests and embedders may
/// set them on the machine before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensors {
    /// Whether the door is open.
    pub door:         bool,
    /// Current energy consumption in watts.
    pub energy:       i64,
    /// Ambient temperature outside the fridge, in degrees Celsius.
    pub outside_temp: i64,
}

impl Default for Sensors {
    fn default() -> Self {
        Self { door:         false,
               energy:       50,
               outside_temp: 25, }
    }
}

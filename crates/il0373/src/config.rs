//! Display configuration types and builder

/// Physical panel width in pixels (source outputs)
pub const WIDTH: u16 = 104;

/// Physical panel height in pixels (gate outputs)
pub const HEIGHT: u16 = 212;

/// Size in bytes of one packed 1-bit plane at the physical resolution
pub const BUFFER_SIZE: usize = (WIDTH as usize * HEIGHT as usize).div_ceil(8);

/// Display rotation relative to native (portrait) orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees (landscape)
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees (landscape)
    Rotate270,
}

impl Rotation {
    /// Logical `(width, height)` seen by callers under this rotation
    pub fn logical_size(self) -> (u16, u16) {
        match self {
            Rotation::Rotate0 | Rotation::Rotate180 => (WIDTH, HEIGHT),
            Rotation::Rotate90 | Rotation::Rotate270 => (HEIGHT, WIDTH),
        }
    }
}

/// Display configuration
///
/// Holds the register values written during `init` and `sleep`, plus the
/// rotation canvases should be created with. Use [`Builder`] to create one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Rotation applied to canvases created from this configuration
    pub rotation: Rotation,
    /// Booster soft-start phases (3 bytes for command 0x06)
    pub booster_soft_start: [u8; 3],
    /// Panel setting byte (command 0x00)
    pub panel_setting: u8,
    /// VCOM and data interval byte (command 0x50)
    pub vcom_data_interval: u8,
    /// VCM DC byte written before power-down (command 0x82)
    pub vcm_dc: u8,
    /// Power setting written before power-down (4 bytes for command 0x01)
    pub power_setting: [u8; 4],
    /// Settling delay before and after each plane transfer, in milliseconds
    pub transfer_delay_ms: u32,
}

impl Config {
    /// Resolution setting parameters: width as a byte, height big-endian
    pub fn resolution_bytes(&self) -> [u8; 3] {
        let [hi, lo] = HEIGHT.to_be_bytes();
        [WIDTH as u8, hi, lo]
    }

    /// Logical dimensions under the configured rotation
    pub fn rotated_size(&self) -> (u16, u16) {
        self.rotation.logical_size()
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use il0373::{Builder, Rotation};
///
/// let config = Builder::new()
///     .rotation(Rotation::Rotate90)
///     .panel_setting(0x8F)
///     .build();
/// assert_eq!(config.rotated_size(), (212, 104));
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    rotation: Rotation,
    booster_soft_start: [u8; 3],
    panel_setting: u8,
    vcom_data_interval: u8,
    vcm_dc: u8,
    power_setting: [u8; 4],
    transfer_delay_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            rotation: Rotation::Rotate0,
            booster_soft_start: [0x17, 0x17, 0x17],
            // KW-R mode, 96x230 resolution select, scan up, shift right, booster on
            panel_setting: 0x8F,
            // White border, default interval
            vcom_data_interval: 0x37,
            vcm_dc: 0x00,
            power_setting: [0x02, 0x00, 0x00, 0x00],
            transfer_delay_ms: 2,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set booster soft-start phases
    pub fn booster_soft_start(mut self, values: [u8; 3]) -> Self {
        self.booster_soft_start = values;
        self
    }

    /// Set panel setting byte
    pub fn panel_setting(mut self, value: u8) -> Self {
        self.panel_setting = value;
        self
    }

    /// Set VCOM and data interval byte
    pub fn vcom_data_interval(mut self, value: u8) -> Self {
        self.vcom_data_interval = value;
        self
    }

    /// Set VCM DC byte used in the sleep sequence
    pub fn vcm_dc(mut self, value: u8) -> Self {
        self.vcm_dc = value;
        self
    }

    /// Set power setting bytes used in the sleep sequence
    pub fn power_setting(mut self, values: [u8; 4]) -> Self {
        self.power_setting = values;
        self
    }

    /// Set the delay around each plane transfer
    pub fn transfer_delay_ms(mut self, ms: u32) -> Self {
        self.transfer_delay_ms = ms;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            rotation: self.rotation,
            booster_soft_start: self.booster_soft_start,
            panel_setting: self.panel_setting,
            vcom_data_interval: self.vcom_data_interval,
            vcm_dc: self.vcm_dc,
            power_setting: self.power_setting,
            transfer_delay_ms: self.transfer_delay_ms,
        }
    }
}

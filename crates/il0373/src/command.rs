//! IL0373 command definitions
//!
//! Every command is a single opcode byte sent with DC low, optionally
//! followed by parameter bytes sent with DC high.
//!
//! ## Example
//!
//! ```rust,no_run
//! use il0373::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Panel setting with one parameter byte
//! let _ = interface.send_command(command::PANEL_SETTING);
//! let _ = interface.send_data(&[0x8F]);
//! ```

/// Panel setting (0x00)
///
/// Resolution select, LUT source, scan directions, booster switch.
/// Requires 1 byte.
pub const PANEL_SETTING: u8 = 0x00;

/// Power setting (0x01)
///
/// Selects internal/external power and the VGH/VGL/VDH/VDL levels.
/// Requires 4 bytes in the sleep sequence.
pub const POWER_SETTING: u8 = 0x01;

/// Power off (0x02)
///
/// Turns off the booster and regulators. BUSY drops while powering down.
pub const POWER_OFF: u8 = 0x02;

/// Power on (0x04)
///
/// Starts the booster. BUSY stays asserted until the rails are up.
pub const POWER_ON: u8 = 0x04;

/// Booster soft start (0x06)
///
/// Soft-start phase timing for the three booster phases.
/// Requires 3 bytes.
pub const BOOSTER_SOFT_START: u8 = 0x06;

/// Data start transmission 1 (0x10)
///
/// Followed by a full black/white plane. Bit=0: black, Bit=1: white.
pub const DATA_START_TRANSMISSION_1: u8 = 0x10;

/// Display refresh (0x12)
///
/// Commits both transferred planes to the panel. BUSY stays asserted
/// for the whole waveform (several seconds on tri-color panels).
pub const DISPLAY_REFRESH: u8 = 0x12;

/// Data start transmission 2 (0x13)
///
/// Followed by a full accent (red) plane. Bit=0: red, Bit=1: no red.
pub const DATA_START_TRANSMISSION_2: u8 = 0x13;

/// VCOM and data interval setting (0x50)
///
/// Border output and the VCOM-to-data interval.
/// Requires 1 byte.
pub const VCOM_AND_DATA_INTERVAL_SETTING: u8 = 0x50;

/// Resolution setting (0x61)
///
/// Requires 3 bytes: width as one byte, then height as a big-endian u16.
pub const RESOLUTION_SETTING: u8 = 0x61;

/// VCM DC setting (0x82)
///
/// Requires 1 byte. Written as 0 before power-down to avoid a VCOM drop.
pub const VCM_DC_SETTING: u8 = 0x82;

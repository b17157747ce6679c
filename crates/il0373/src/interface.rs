//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the IL0373 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The IL0373 requires:
//! - SPI bus (MOSI + SCK), mode 0, MSB first, 2 MHz or faster
//! - Chip select, owned by the [`SpiDevice`] (e.g. `embedded-hal-bus`'s
//!   `ExclusiveDevice`), so every write is framed by CS low/high
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, low while the controller is busy)
//!
//! ## Busy wait
//!
//! [`Interface::busy_wait`] polls BUSY every 100 ms and, by default, never
//! gives up. A stuck BUSY line hangs the caller. Platforms that need an
//! escape can opt in with [`Interface::with_busy_timeout`], which keeps the
//! polling cadence and returns [`InterfaceError::Timeout`] after the given
//! number of polls.

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

/// How long RST is held low, then high, during a hardware reset
pub const RESET_HOLD_MS: u32 = 200;

/// Interval between two reads of the BUSY line
pub const BUSY_POLL_INTERVAL_MS: u32 = 100;

/// Trait for hardware interface to the IL0373 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send a command byte to the controller (DC low)
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send data bytes to the controller (DC high)
    ///
    /// The whole slice goes out in one chip-select framed transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// RST low for at least 200 ms, then high for at least 200 ms.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the RST pin fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Block until the controller reports ready on BUSY
    ///
    /// # Errors
    ///
    /// Returns an error if reading the BUSY pin fails, or if the
    /// implementation bounds the wait and the bound is exceeded.
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Busy line still asserted after the opt-in poll limit
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Spi(e) => write!(f, "SPI error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
            InterfaceError::Timeout => write!(f, "Timeout waiting for display"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Logic level the BUSY line shows while the controller is busy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BusyLevel {
    /// Low while busy, high when ready (2.13" tri-color panel)
    #[default]
    ActiveLow,
    /// High while busy, low when ready
    ActiveHigh,
}

/// Hardware interface implementation for the IL0373
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`], owning chip select
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
pub struct Interface<SPI, DC, RST, BUSY> {
    spi: SPI,
    dc: DC,
    rst: RST,
    busy: BUSY,
    busy_level: BusyLevel,
    busy_timeout_polls: Option<u32>,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface with an unbounded busy wait
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            busy_level: BusyLevel::default(),
            busy_timeout_polls: None,
        }
    }

    /// Override the BUSY polarity for other panel revisions
    pub fn with_busy_level(mut self, level: BusyLevel) -> Self {
        self.busy_level = level;
        self
    }

    /// Give up on BUSY after `max_polls` polls (each 100 ms apart)
    pub fn with_busy_timeout(mut self, max_polls: u32) -> Self {
        self.busy_timeout_polls = Some(max_polls);
        self
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST, BUSY) {
        (self.spi, self.dc, self.rst, self.busy)
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_HOLD_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_HOLD_MS);
        Ok(())
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        let mut polls = 0u32;

        loop {
            let busy = match self.busy_level {
                BusyLevel::ActiveLow => self.busy.is_low(),
                BusyLevel::ActiveHigh => self.busy.is_high(),
            }
            .map_err(InterfaceError::Pin)?;

            if !busy {
                if polls > 0 {
                    log::trace!("busy released after {polls} polls");
                }
                return Ok(());
            }

            if let Some(max) = self.busy_timeout_polls {
                if polls >= max {
                    log::warn!("busy line still asserted after {polls} polls");
                    return Err(InterfaceError::Timeout);
                }
            }

            polls += 1;
            log::trace!("busy, poll {polls}");
            delay.delay_ms(BUSY_POLL_INTERVAL_MS);
        }
    }
}

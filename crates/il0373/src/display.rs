//! Controller protocol: power sequencing, frame transfer and refresh

use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::command::*;
use crate::config::{BUFFER_SIZE, Config, Rotation};
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Operating state of the panel controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    /// Unpowered or freshly reset; `init` is required before drawing
    #[default]
    Reset,
    /// Powered and ready for a frame
    Idle,
    /// Refresh in progress; only observed if a refresh failed midway
    Busy,
    /// Powered down; `init` is the only way back
    Sleeping,
}

/// Core display driver for the IL0373
///
/// Owns the hardware interface and walks the controller through its power
/// states. Pixel data lives in caller-owned [`Canvas`] planes.
///
/// ## Example
///
/// ```rust,no_run
/// use il0373::{BUFFER_SIZE, Builder, Canvas, Display, Draw, Interface, Rotation};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::digital::{InputPin, OutputPin};
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl InputPin for MockPin {
/// #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
/// #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
/// let mut display = Display::new(interface, Builder::new().rotation(Rotation::Rotate90).build());
/// let _ = display.init(&mut delay);
///
/// let mut black = Canvas::new([0u8; BUFFER_SIZE], display.rotation()).unwrap();
/// black.clear();
/// black.draw_filled_rectangle(0, 0, 10, 10, true);
///
/// let _ = display.display_canvases(Some(&black), None::<&Canvas<[u8; BUFFER_SIZE]>>, &mut delay);
/// let _ = display.sleep(&mut delay);
/// ```
pub struct Display<I>
where
    I: DisplayInterface,
{
    interface: I,
    config: Config,
    state: PowerState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: PowerState::Reset,
        }
    }

    /// Pulse the reset line, re-arming the controller
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.state = PowerState::Reset;
        log::debug!("il0373: hardware reset");
        Ok(())
    }

    /// Reset, power up and program panel geometry
    ///
    /// This is also the only way to wake the panel after [`Display::sleep`].
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.reset(delay)?;

        let booster = self.config.booster_soft_start;
        self.send_command(BOOSTER_SOFT_START, &booster)?;
        self.send_command(POWER_ON, &[])?;
        self.wait_until_idle(delay)?;

        self.send_command(PANEL_SETTING, &[self.config.panel_setting])?;
        self.send_command(
            VCOM_AND_DATA_INTERVAL_SETTING,
            &[self.config.vcom_data_interval],
        )?;
        let resolution = self.config.resolution_bytes();
        self.send_command(RESOLUTION_SETTING, &resolution)?;

        self.state = PowerState::Idle;
        log::debug!("il0373: initialized");
        Ok(())
    }

    /// Block until the controller drops BUSY
    ///
    /// Polls every 100 ms. With the stock [`Interface`](crate::Interface)
    /// there is no timeout, so a stuck BUSY line blocks forever.
    pub fn wait_until_idle<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }

    /// Stream one or both planes and refresh the panel
    ///
    /// Each given plane is sent as exactly [`BUFFER_SIZE`] bytes after its
    /// data-start command. The refresh runs even when both planes are
    /// `None`, re-showing whatever the controller RAM holds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] before touching the bus if a plane
    /// is shorter than [`BUFFER_SIZE`].
    pub fn display_frame<D: DelayNs>(
        &mut self,
        black: Option<&[u8]>,
        accent: Option<&[u8]>,
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        for plane in [black, accent].into_iter().flatten() {
            if plane.len() < BUFFER_SIZE {
                return Err(Error::BufferTooSmall {
                    required: BUFFER_SIZE,
                    provided: plane.len(),
                });
            }
        }

        if self.state != PowerState::Idle {
            log::warn!("il0373: frame sent while {:?}", self.state);
        }

        if let Some(plane) = black {
            self.transfer_plane(DATA_START_TRANSMISSION_1, &plane[..BUFFER_SIZE], delay)?;
        }
        if let Some(plane) = accent {
            self.transfer_plane(DATA_START_TRANSMISSION_2, &plane[..BUFFER_SIZE], delay)?;
        }

        self.state = PowerState::Busy;
        self.send_command(DISPLAY_REFRESH, &[])?;
        self.wait_until_idle(delay)?;
        self.state = PowerState::Idle;
        log::debug!("il0373: refresh complete");
        Ok(())
    }

    /// [`Display::display_frame`] taking canvases instead of raw planes
    pub fn display_canvases<B1, B2, D>(
        &mut self,
        black: Option<&Canvas<B1>>,
        accent: Option<&Canvas<B2>>,
        delay: &mut D,
    ) -> Result<(), Error<I>>
    where
        B1: AsRef<[u8]> + AsMut<[u8]>,
        B2: AsRef<[u8]> + AsMut<[u8]>,
        D: DelayNs,
    {
        self.display_frame(black.map(Canvas::buffer), accent.map(Canvas::buffer), delay)
    }

    /// Power the panel down
    ///
    /// The image stays visible. Call [`Display::init`] before the next frame.
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.send_command(
            VCOM_AND_DATA_INTERVAL_SETTING,
            &[self.config.vcom_data_interval],
        )?;
        // VCM_DC to 0 first, otherwise VCOM drops during power-off
        self.send_command(VCM_DC_SETTING, &[self.config.vcm_dc])?;
        let power = self.config.power_setting;
        self.send_command(POWER_SETTING, &power)?;
        self.wait_until_idle(delay)?;
        self.send_command(POWER_OFF, &[])?;

        self.state = PowerState::Sleeping;
        log::debug!("il0373: sleeping");
        Ok(())
    }

    /// Send a command byte followed by its parameter bytes, if any
    pub fn send_command(&mut self, command: u8, params: &[u8]) -> Result<(), Error<I>> {
        self.interface
            .send_command(command)
            .map_err(Error::Interface)?;
        if !params.is_empty() {
            self.interface.send_data(params).map_err(Error::Interface)?;
        }
        Ok(())
    }

    fn transfer_plane<D: DelayNs>(
        &mut self,
        command: u8,
        plane: &[u8],
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        self.send_command(command, &[])?;
        delay.delay_ms(self.config.transfer_delay_ms);
        self.interface.send_data(plane).map_err(Error::Interface)?;
        delay.delay_ms(self.config.transfer_delay_ms);
        log::debug!("il0373: sent {} bytes after 0x{command:02X}", plane.len());
        Ok(())
    }

    /// Current controller state
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Rotation canvases for this panel should use
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give the interface back
    pub fn release(self) -> I {
        self.interface
    }
}

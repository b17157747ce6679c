//! # IL0373 E-Paper Display Driver
//!
//! A `no_std` driver for the IL0373 controller on 104×212 black/white/red
//! e-paper panels, built on [`embedded-hal`] 1.0 traits.
//!
//! Pixels are drawn into caller-owned [`Canvas`] planes, one for black and
//! one for the red accent, then streamed to the controller by [`Display`].
//! The [`Draw`] trait rasterizes lines, rectangles, circles and bitmap
//! [`Font`] text onto any plane.
//!
//! ## Architecture
//!
//! - [`Interface`] - SPI and GPIO framing behind the [`DisplayInterface`] trait
//! - [`Display`] - Controller protocol: reset, init, frame transfer, sleep
//! - [`Canvas`] - Bit-packed plane with a rotation transform
//! - [`Draw`] - Shape and text rasterizer over any [`PixelTarget`]
//! - [`GraphicDisplay`] - embedded-graphics `DrawTarget` over both planes (feature `graphics`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use il0373::{BUFFER_SIZE, Builder, Canvas, Display, Draw, Interface, Rotation};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (spi, dc, rst, busy) = (MockSpi, MockPin, MockPin, MockPin);
//! # let mut delay = MockDelay;
//! // 1. Create the hardware interface
//! let interface = Interface::new(spi, dc, rst, busy);
//!
//! // 2. Configure and power up
//! let config = Builder::new().rotation(Rotation::Rotate270).build();
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//!
//! // 3. Draw into the planes
//! let mut black = Canvas::new([0u8; BUFFER_SIZE], display.rotation()).unwrap();
//! let mut red = Canvas::new([0u8; BUFFER_SIZE], display.rotation()).unwrap();
//! black.clear();
//! red.clear();
//! black.draw_rectangle(0, 0, 211, 103, true);
//! red.draw_filled_circle(106, 52, 30, true);
//!
//! // 4. Refresh, then power down
//! let _ = display.display_canvases(Some(&black), Some(&red), &mut delay);
//! let _ = display.sleep(&mut delay);
//! ```
//!
//! ## Features
//!
//! - `graphics` (default) - `DrawTarget` impls for [`Canvas`] and `GraphicDisplay`
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal

#![no_std]

pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod interface;
pub mod raster;

pub use canvas::{Canvas, PixelTarget};
pub use color::Color;
pub use config::{BUFFER_SIZE, Builder, Config, HEIGHT, Rotation, WIDTH};
pub use display::{Display, PowerState};
pub use error::{CanvasError, Error};
pub use font::Font;
#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;
pub use interface::{BusyLevel, DisplayInterface, Interface, InterfaceError};
pub use raster::Draw;

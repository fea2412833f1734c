//! The bus transport capability consumed by the driver.
//!
//! The SSD1306's serial protocol frames every transaction behind a control byte: `0x00` for
//! command bytes, `0x40` for display RAM data. Implementations of `DisplayInterface` own
//! that framing so the driver and command encoder deal only in logical bytes.

/// Control byte announcing that command bytes follow.
pub const CONTROL_COMMANDS: u8 = 0x00;
/// Control byte announcing that display RAM data follows.
pub const CONTROL_DATA: u8 = 0x40;

pub trait DisplayInterface {
    /// Transmit a group of 1-3 command bytes as one framed transaction.
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), ()>;
    /// Transmit display RAM data as framed data transactions.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), ()>;
    /// Read the single controller status byte; used only for identification.
    fn read_status(&mut self) -> Result<u8, ()>;
}

pub mod i2c {
    //! The two-wire interface. The SSD1306 reserves two 7-bit addresses, selected by the
    //! D/C# pin strap on the module.

    use embedded_hal::blocking::i2c::{Read, Write};

    use super::{DisplayInterface, CONTROL_COMMANDS, CONTROL_DATA};

    /// Primary reserved bus address (D/C# strapped low).
    pub const ADDR_PRIMARY: u8 = 0x3C;
    /// Secondary reserved bus address (D/C# strapped high).
    pub const ADDR_SECONDARY: u8 = 0x3D;

    /// Data bytes transmitted per bus transaction. Sized to a small multiple of the widest
    /// panel so a full-screen clear costs few transactions without a screen-sized buffer.
    const DATA_CHUNK: usize = 128;

    pub struct I2cInterface<I2C> {
        /// The I2C master device the SSD1306 is attached to.
        i2c: I2C,
        /// The 7-bit device address, normally `ADDR_PRIMARY` or `ADDR_SECONDARY`.
        addr: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: Write + Read,
    {
        /// Create a new I2C interface to communicate with the display driver at `addr`.
        /// Bus speed and timing are the I2C master's concern and are configured on `i2c`
        /// before it is handed over.
        pub fn new(i2c: I2C, addr: u8) -> Self {
            Self { i2c, addr }
        }

        /// Release the bus device, e.g. after a failed identification.
        pub fn release(self) -> I2C {
            self.i2c
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: Write + Read,
    {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), ()> {
            let mut buf = [CONTROL_COMMANDS; 4];
            if cmds.is_empty() || cmds.len() + 1 > buf.len() {
                return Err(());
            }
            buf[1..=cmds.len()].copy_from_slice(cmds);
            self.i2c
                .write(self.addr, &buf[..=cmds.len()])
                .map_err(|_| ())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), ()> {
            let mut buf = [0u8; DATA_CHUNK + 1];
            buf[0] = CONTROL_DATA;
            for chunk in data.chunks(DATA_CHUNK) {
                buf[1..=chunk.len()].copy_from_slice(chunk);
                self.i2c
                    .write(self.addr, &buf[..=chunk.len()])
                    .map_err(|_| ())?;
            }
            Ok(())
        }

        fn read_status(&mut self) -> Result<u8, ()> {
            let mut status = [0u8; 1];
            self.i2c.read(self.addr, &mut status).map_err(|_| ())?;
            Ok(status[0])
        }
    }

}

#[cfg(test)]
pub mod test_spy {
    //! An interface for use in unit tests to spy on whatever was sent to it.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::DisplayInterface;

    /// One logical transaction as seen by the interface, before control-byte framing.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Sent {
        Cmds(Vec<u8>),
        Data(Vec<u8>),
    }

    pub struct TestSpyInterface {
        sent: Rc<RefCell<Vec<Sent>>>,
        status: Rc<RefCell<u8>>,
        bus_fault: Rc<RefCell<bool>>,
    }

    impl TestSpyInterface {
        pub fn new() -> Self {
            TestSpyInterface {
                sent: Rc::new(RefCell::new(Vec::new())),
                status: Rc::new(RefCell::new(0x03)),
                bus_fault: Rc::new(RefCell::new(false)),
            }
        }

        /// Make a second handle onto the same spy, so one half can be moved into the display
        /// under test while the other is used for checking.
        pub fn split(&self) -> Self {
            TestSpyInterface {
                sent: self.sent.clone(),
                status: self.status.clone(),
                bus_fault: self.bus_fault.clone(),
            }
        }

        /// Script the status byte served to `read_status`.
        pub fn set_status(&self, status: u8) {
            *self.status.borrow_mut() = status;
        }

        /// Make every subsequent transaction fail, emulating a wedged bus.
        pub fn set_bus_fault(&self, fault: bool) {
            *self.bus_fault.borrow_mut() = fault;
        }

        pub fn check_multi(&self, expect: &[Sent]) {
            assert_eq!(*self.sent.borrow(), expect);
        }

        pub fn sent(&self) -> Vec<Sent> {
            self.sent.borrow().clone()
        }

        pub fn clear(&mut self) {
            self.sent.borrow_mut().clear()
        }
    }

    impl DisplayInterface for TestSpyInterface {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), ()> {
            if *self.bus_fault.borrow() {
                return Err(());
            }
            self.sent.borrow_mut().push(Sent::Cmds(cmds.to_vec()));
            Ok(())
        }
        fn send_data(&mut self, data: &[u8]) -> Result<(), ()> {
            if *self.bus_fault.borrow() {
                return Err(());
            }
            self.sent.borrow_mut().push(Sent::Data(data.to_vec()));
            Ok(())
        }
        fn read_status(&mut self) -> Result<u8, ()> {
            if *self.bus_fault.borrow() {
                return Err(());
            }
            Ok(*self.status.borrow())
        }
    }
}

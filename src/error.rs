use alloc::string::String;
use core::fmt::{Debug, Formatter, Result};

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(dead_code, clippy::upper_case_acronyms)]
/// POSIX errno
pub enum SocErrorNum {
    EPERM = 1,   // Operation not permitted.
    ENOENT = 2,  // No such file or directory.
    EIO = 5,     // I/O error.
    ENOMEM = 12, // Not enough space.
    EBUSY = 16,  // Device or resource busy.
    EEXIST = 17, // File exists.
    ENODEV = 19, // No such device.
    EINVAL = 22, // Invalid argument.
}

pub struct SocError {
    pub num: SocErrorNum,
    pub loc_line: u32,
    pub loc_col: u32,
    pub loc_file: &'static str,
    pub msg: Option<String>,
}

pub type SocResult<T = ()> = core::result::Result<T, SocError>;

impl SocErrorNum {
    pub fn as_str(&self) -> &'static str {
        use SocErrorNum::*;
        match *self {
            EPERM => "Operation not permitted",
            ENOENT => "No such file or directory",
            EIO => "I/O error",
            ENOMEM => "Out of memory",
            EBUSY => "Device or resource busy",
            EEXIST => "File exists",
            ENODEV => "No such device",
            EINVAL => "Invalid argument",
        }
    }
}

impl SocError {
    pub fn new(
        num: SocErrorNum,
        loc_file: &'static str,
        loc_line: u32,
        loc_col: u32,
        msg: Option<String>,
    ) -> Self {
        Self {
            num,
            loc_file,
            loc_line,
            loc_col,
            msg,
        }
    }

    pub fn code(&self) -> isize {
        -(self.num as usize as isize)
    }
}

impl Debug for SocError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "[{}:{}:{}] {}",
            self.loc_file,
            self.loc_line,
            self.loc_col,
            self.num.as_str()
        )?;
        if let Some(ref msg) = self.msg {
            write!(f, ": {}", msg)?;
        }
        Ok(())
    }
}

/// Generate a SocError according to errno and msg.
#[macro_export]
macro_rules! soc_err {
    ($num: ident) => {{
        use $crate::error::{SocError, SocErrorNum::*};
        SocError::new($num, file!(), line!(), column!(), None)
    }};
    ($num: ident, $msg: expr) => {{
        use $crate::error::{SocError, SocErrorNum::*};
        SocError::new($num, file!(), line!(), column!(), Some($msg.into()))
    }};
}

/// Generate a Err including a SocError struct
#[macro_export]
macro_rules! soc_result_err {
    ($num: ident) => {
        Err($crate::soc_err!($num))
    };
    ($num: ident, $msg: expr) => {
        Err($crate::soc_err!($num, $msg))
    };
}

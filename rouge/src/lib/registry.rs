//! One [`Original`] per interposed (name, signature) pair.
//!
//! Entries are fixed at compile time and never go away. Each comes with a
//! getter of the same name as the C function, so wrapper bodies read like
//! `registry::puts()(s)`.

use crate::error::Result;
use crate::ffi::*;
use crate::resolve::Original;
use std::ffi::CStr;

const fn symbol(bytes: &'static [u8]) -> &'static CStr {
    match CStr::from_bytes_with_nul(bytes) {
        Ok(name)    => name,
        Err(_)      => panic!("malformed symbol name"),
    }
}

macro_rules! originals {
    ($($slot:ident / $getter:ident : $sig:ty;)+) => {
        $(
            pub static $slot: Original<$sig> = Original::new(
                symbol(concat!(stringify!($getter), "\0").as_bytes())
            );

            #[inline(always)]
            pub unsafe fn $getter() -> $sig {
                $slot.get()
            }
        )+

        #[cfg(test)]
        pub fn names() -> &'static [&'static CStr] {
            const NAMES: &[&CStr] = &[$(symbol(concat!(stringify!($getter), "\0").as_bytes()),)+];
            NAMES
        }

        pub unsafe fn resolve_all() -> Result<()> {
            //! Resolves every entry now instead of on first use.
            $( $slot.resolve()?; )+
            Ok(())
        }
    };
}

originals! {
    PRINTF  / printf    : CPrintf;
    // Never interposed, only used to forward `printf`'s arguments.
    VPRINTF / vprintf   : CVprintf;
    PUTS    / puts      : CPuts;
}

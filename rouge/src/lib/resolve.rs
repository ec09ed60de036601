use crate::error::{Error, Result};
use crate::ffi::*;
use std::ffi::CStr;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicPtr, Ordering};

pub unsafe fn next_symbol(name: &CStr) -> Result<NonNull<void>> {
    //! Address of the next definition of `name` in the dynamic search
    //! order, *after* the object making this call.
    //!
    //! Asking for `name` plainly would find our own wrapper again and
    //! recurse until the stack runs out. `RTLD_NEXT` skips it.
    //! `dlsym` is thread-safe!
    //! [source: https://man7.org/linux/man-pages/man3/dlsym.3.html#ATTRIBUTES]

    // A null result is only an error if `dlerror` says so,
    // so anything stale has to go first.
    last_dlerror();
    let address = dlsym(RTLD_NEXT, name.as_ptr());
    let reason = last_dlerror();

    match NonNull::new(address) {
        Some(addr) if reason.is_none() => Ok(addr),
        _ => Err(Error::Unresolved {
            symbol: name.to_string_lossy().into_owned(),
            reason: reason.unwrap_or_else(|| "symbol resolved to NULL".to_string()),
        }),
    }
}

/// Handle to the original implementation of one interposed function,
/// resolved on first use and kept for the rest of the process.
///
/// `F` must be the `unsafe extern "C" fn` type of the real function.
///
/// Threads racing through the first resolution each call `dlsym` and
/// store the same address, so no lock is needed.
pub struct Original<F> {
    name:   &'static CStr,
    ptr:    AtomicPtr<void>,
    _sig:   PhantomData<F>,
}

// The cached address is just as valid on any thread.
unsafe impl<F> Sync for Original<F> {}
unsafe impl<F> Send for Original<F> {}

impl<F: Copy> Original<F> {
    const SIG_IS_POINTER: () = assert!(
        mem::size_of::<F>() == mem::size_of::<*mut void>(),
        "Original<F> needs F to be a function pointer type"
    );

    pub const fn new(name: &'static CStr) -> Self {
        Original {
            name,
            ptr:    AtomicPtr::new(ptr::null_mut()),
            _sig:   PhantomData,
        }
    }

    pub fn name(&self) -> &'static CStr {
        self.name
    }

    pub fn is_resolved(&self) -> bool {
        !self.ptr.load(Ordering::Acquire).is_null()
    }

    pub unsafe fn resolve(&self) -> Result<F> {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIG_IS_POINTER;

        let mut address = self.ptr.load(Ordering::Acquire);
        if address.is_null() {
            address = next_symbol(self.name())?.as_ptr();
            self.ptr.store(address, Ordering::Release);
        }

        Ok(mem::transmute_copy::<*mut void, F>(&address))
    }

    #[inline]
    pub unsafe fn get(&self) -> F {
        //! Like [`Original::resolve`], but a missing original
        //! takes the whole process down.

        match self.resolve() {
            Ok(f)   => f,
            Err(e)  => fatal(&e),
        }
    }
}

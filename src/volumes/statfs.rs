//! Disk usage via statvfs

use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Total and free bytes for one mounted filesystem.
#[derive(Clone, Copy, Debug)]
pub struct Usage {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Query the filesystem holding `path`.
///
/// Free space is what an unprivileged caller can actually use
/// (`f_bavail`), so the numbers line up with `df`.
pub fn usage(path: &Path) -> io::Result<Usage> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))?;

    let mut stat = MaybeUninit::<libc::statvfs>::uninit();
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let stat = unsafe { stat.assume_init() };
    let frsize = if stat.f_frsize > 0 {
        stat.f_frsize
    } else {
        stat.f_bsize
    };

    Ok(Usage {
        total_bytes: stat.f_blocks as u64 * frsize as u64,
        free_bytes: stat.f_bavail as u64 * frsize as u64,
    })
}

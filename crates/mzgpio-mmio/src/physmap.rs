//! Physical memory mapping for MMIO access.
//!
//! Safe wrapper around an `/dev/mem` mapping of one register window. The
//! SFRs of the PIC32MZ are 32-bit registers, so only word-sized volatile
//! accessors are provided.

use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;

/// A mapped region of physical memory.
pub struct PhysMap {
    /// Pointer to the mapped memory, adjusted past the alignment offset
    ptr: *mut u8,
    /// Size of the mapping
    size: usize,
    /// Physical address, kept for unmapping and diagnostics
    phys_addr: u64,
}

impl PhysMap {
    /// Map a region of physical memory for MMIO access.
    ///
    /// Opens `/dev/mem` with `O_SYNC` for uncached access and maps a
    /// page-aligned window covering `[phys_addr, phys_addr + size)`.
    pub fn new(phys_addr: u64, size: usize) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open("/dev/mem")?;

        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as usize;
        let page_mask = page_size - 1;
        let offset = (phys_addr as usize) & page_mask;
        let aligned_addr = phys_addr & !(page_mask as u64);

        // Round up to cover the alignment slack and end on a page boundary
        let map_size = (size + offset + page_mask) & !page_mask;

        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                map_size,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                file.as_raw_fd(),
                aligned_addr as libc::off_t,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }

        let adjusted_ptr = unsafe { (ptr as *mut u8).add(offset) };

        Ok(Self {
            ptr: adjusted_ptr,
            size: map_size,
            phys_addr,
        })
    }

    /// Read a 32-bit register at `offset`.
    ///
    /// The offset must be within the mapped region and word-aligned.
    #[inline]
    pub fn read32(&self, offset: usize) -> u32 {
        debug_assert!(offset + 4 <= self.size);
        debug_assert!(offset & 3 == 0, "unaligned 32-bit read");
        unsafe { core::ptr::read_volatile(self.ptr.add(offset) as *const u32) }
    }

    /// Write a 32-bit register at `offset`.
    ///
    /// The offset must be within the mapped region and word-aligned.
    #[inline]
    pub fn write32(&self, offset: usize, value: u32) {
        debug_assert!(offset + 4 <= self.size);
        debug_assert!(offset & 3 == 0, "unaligned 32-bit write");
        unsafe { core::ptr::write_volatile(self.ptr.add(offset) as *mut u32, value) }
    }

    /// Physical address of this mapping.
    pub fn phys_addr(&self) -> u64 {
        self.phys_addr
    }

    /// Size of this mapping, including alignment slack.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the mapping is empty (never true for a live mapping).
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl Drop for PhysMap {
    fn drop(&mut self) {
        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as usize;
        let page_mask = page_size - 1;
        let offset = (self.phys_addr as usize) & page_mask;
        let original_ptr = unsafe { self.ptr.sub(offset) };

        unsafe {
            libc::munmap(original_ptr as *mut libc::c_void, self.size);
        }
    }
}

// MMIO registers have no memory aliasing concerns beyond volatility
unsafe impl Send for PhysMap {}
unsafe impl Sync for PhysMap {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires root and /dev/mem access
    fn map_the_ports_window() {
        let map = PhysMap::new(0x1f86_0000, 0x1000).unwrap();
        assert!(map.len() >= 0x1000);
        assert_eq!(map.phys_addr(), 0x1f86_0000);
    }
}

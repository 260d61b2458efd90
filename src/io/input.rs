use crate::io::report;
use memmap::Mmap;
use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

pub(crate) enum Input {
    Mapped(Mmap),
    Buffered(Box<[u8]>),
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(map) => &map[..],
            Self::Buffered(bytes) => &bytes[..],
        }
    }
}

fn read_stdin() -> io::Result<Input> {
    let mut buffer = vec![];
    io::stdin().read_to_end(&mut buffer)?;
    Ok(Input::Buffered(buffer.into_boxed_slice()))
}

fn map_file(path: &Path) -> io::Result<Input> {
    let file = File::open(path)?;
    // zero-length files cannot be mapped
    if file.metadata()?.len() == 0 {
        return Ok(Input::Buffered(Box::default()));
    }
    let map = unsafe { Mmap::map(&file)? };
    Ok(Input::Mapped(map))
}

pub(crate) fn load(path: Option<&Path>) -> Input {
    let input = match path {
        Some(path) => map_file(path),
        None => read_stdin(),
    };
    input.unwrap_or_else(|err| report::os_error(err))
}

#![cfg(feature = "std")]

use std::io::{BufReader, ErrorKind, Read};

use crate::bytestream::{ByteIoError, ByteReaderTrait};

impl<R: Read> ByteReaderTrait for BufReader<R> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        // retry on interruption, a short count is only returned at EOF
        let mut read = 0;
        while read < buf.len() {
            match self.read(&mut buf[read..]) {
                Ok(0) => break,
                Ok(n) => read += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ByteIoError::from(e))
            }
        }
        Ok(read)
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use crate::bytestream::ByteReaderTrait;

    #[test]
    fn buf_reader_reports_eof() {
        let data: &[u8] = &[1, 2, 3];
        let mut reader = BufReader::new(data);
        let mut buf = [0; 4];

        assert!(reader.read_exact_bytes(&mut buf).is_err());
    }
}

use block_buffer::byteorder::{ByteOrder, BE};
use block_buffer::BlockBuffer;
use digest::generic_array::typenum::{U32, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Input, Reset};

use crate::consts::{BLOCK_SIZE, DIGEST_SIZE, IV, MAX_PAD_LEN, STATE_LEN};
use crate::padding::write_padding;
use crate::utils::{compress256, Block};

type BlockSize = U64;

#[derive(Clone)]
struct EngineState {
    h: [u32; STATE_LEN],
}

impl EngineState {
    fn new(h: &[u32; STATE_LEN]) -> EngineState {
        EngineState { h: *h }
    }

    fn process_block(&mut self, block: &Block) {
        compress256(&mut self.h, block);
    }

    fn write_digest(&self, out: &mut [u8]) {
        BE::write_u32_into(&self.h, out);
    }
}

#[derive(Clone)]
struct Engine {
    /// Message bytes written so far, padding excluded.
    len: u64,
    buffer: BlockBuffer<BlockSize>,
    state: EngineState,
}

impl Engine {
    fn new(h: &[u32; STATE_LEN]) -> Engine {
        Engine {
            len: 0,
            buffer: Default::default(),
            state: EngineState::new(h),
        }
    }

    fn input(&mut self, input: &[u8]) {
        self.len = self.len.wrapping_add(input.len() as u64);
        self.process(input);
    }

    fn process(&mut self, input: &[u8]) {
        let self_state = &mut self.state;
        self.buffer
            .input(input, |block| self_state.process_block(block));
        debug_assert!(self.buffer.position() < BLOCK_SIZE);
    }

    fn finish(&mut self) {
        debug_assert_eq!((self.len % BLOCK_SIZE as u64) as usize, self.buffer.position());

        let mut padding = [0u8; MAX_PAD_LEN];
        let n = write_padding(self.len, &mut padding);
        self.process(&padding[..n]);

        debug_assert_eq!(
            self.buffer.position(),
            0,
            "sm3: data left in buffer after padding"
        );
    }

    fn reset(&mut self, h: &[u32; STATE_LEN]) {
        self.len = 0;
        self.buffer.reset();
        self.state = EngineState::new(h);
    }
}

/// Streaming SM3 hasher.
///
/// Data may be written in chunks of any size. [`Sm3::finalize`] works on a
/// copy of the hasher, so more data can be written after a digest is taken.
#[derive(Clone)]
pub struct Sm3 {
    engine: Engine,
}

impl Sm3 {
    /// Block size in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;
    /// Digest size in bytes.
    pub const OUTPUT_SIZE: usize = DIGEST_SIZE;

    pub fn new() -> Sm3 {
        Sm3::default()
    }

    /// Absorbs `data` and returns the number of bytes accepted, which is
    /// always `data.len()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        self.engine.input(data);
        data.len()
    }

    /// Returns the digest of everything written so far. The hasher itself is
    /// left untouched.
    pub fn finalize(&self) -> [u8; DIGEST_SIZE] {
        let mut engine = self.engine.clone();
        engine.finish();
        let mut out = [0u8; DIGEST_SIZE];
        engine.state.write_digest(&mut out);
        out
    }

    /// Returns the hasher to its initial state.
    pub fn reset(&mut self) {
        self.engine.reset(&IV);
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Sm3 {
            engine: Engine::new(&IV),
        }
    }
}

impl BlockInput for Sm3 {
    type BlockSize = BlockSize;
}

impl Input for Sm3 {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.engine.input(input.as_ref());
    }
}

impl FixedOutput for Sm3 {
    type OutputSize = U32;

    fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
        self.engine.finish();
        let mut out = GenericArray::default();
        self.engine.state.write_digest(out.as_mut_slice());
        out
    }
}

impl Reset for Sm3 {
    fn reset(&mut self) {
        self.engine.reset(&IV);
    }
}

opaque_debug::impl_opaque_debug!(Sm3);

#[cfg(feature = "std")]
impl std::io::Write for Sm3 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.engine.input(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

//! WASM bindings for packed SWAR bitboards.
//!
//! Boards cross the boundary as little-endian `u32` word arrays. Shapes are
//! passed as an axis array plus a bit depth, where 0 means boolean cells.

use wasm_bindgen::prelude::*;
use swar_board::{
    decode, encode, debug::render, product, BigUint, Bitboard, BoardError, BoardShape,
    CompareOpts, GteComparator, Grid, Shift,
};

/// Convert a board to little-endian `u32` words, without trailing zeros.
fn board_to_words(board: &Bitboard) -> Vec<u32> {
    board.to_u32_digits()
}

/// Convert little-endian `u32` words to a board.
fn words_to_board(words: &[u32]) -> Bitboard {
    BigUint::from_slice(words)
}

/// Flat shift amount as a JS number. Exact for every amount below `2^53`.
fn amount_to_js(amount: isize) -> f64 {
    amount as f64
}

fn make_shape(axes: &[u32], bit_depth: u32) -> Result<BoardShape, BoardError> {
    let axes: Vec<usize> = axes.iter().map(|&a| a as usize).collect();
    match bit_depth {
        0 => BoardShape::new(&axes),
        depth => BoardShape::with_bit_depth(&axes, depth as usize),
    }
}

fn js_error(err: BoardError) -> JsValue {
    let message = err.to_string();
    log(&message);
    JsValue::from_str(&message)
}

/// Initialise panic reporting to the browser console.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
}

/// Pack row-major cell values into a board.
///
/// # Example (JavaScript)
/// ```javascript
/// const board = encode_cells(new Uint32Array([1, 2, 3, 0, 1, 4]), new Uint32Array([2, 3]), 4);
/// ```
#[wasm_bindgen]
pub fn encode_cells(cells: &[u32], axes: &[u32], bit_depth: u32) -> Result<Vec<u32>, JsValue> {
    let shape = make_shape(axes, bit_depth).map_err(js_error)?;
    let grid = Grid::new(shape.axes().to_vec(), cells.to_vec()).map_err(js_error)?;
    let depth = shape.is_multi_bit().then(|| shape.bit_depth());
    Ok(board_to_words(&encode(&grid, depth)))
}

/// Unpack a board into row-major values.
///
/// Without `fold` every bit of the layout is returned (bit planes last);
/// with `fold` multi-bit cells are returned as integers.
#[wasm_bindgen]
pub fn decode_cells(
    words: &[u32],
    axes: &[u32],
    bit_depth: u32,
    fold: bool,
) -> Result<Vec<u32>, JsValue> {
    let shape = make_shape(axes, bit_depth).map_err(js_error)?;
    let grid = decode(&shape, &words_to_board(words), fold);
    Ok(grid.cells().iter().map(|&v| v as u32).collect())
}

/// A precomputed saturating translation.
#[wasm_bindgen]
pub struct ShiftOp {
    inner: Shift,
}

#[wasm_bindgen]
impl ShiftOp {
    #[wasm_bindgen(constructor)]
    pub fn new(axes: &[u32], bit_depth: u32, vector: &[i32]) -> Result<ShiftOp, JsValue> {
        let shape = make_shape(axes, bit_depth).map_err(js_error)?;
        let vector: Vec<isize> = vector.iter().map(|&v| v as isize).collect();
        let inner = Shift::new(&shape, &vector).map_err(js_error)?;
        Ok(ShiftOp { inner })
    }

    /// Flat bit shift of this translation.
    #[wasm_bindgen(getter)]
    pub fn amount(&self) -> f64 {
        amount_to_js(self.inner.amount())
    }

    pub fn apply(&self, words: &[u32]) -> Vec<u32> {
        board_to_words(&self.inner.apply(&words_to_board(words)))
    }
}

/// A precomputed per-cell `>=` comparator.
#[wasm_bindgen]
pub struct GteOp {
    inner: GteComparator,
}

#[wasm_bindgen]
impl GteOp {
    #[wasm_bindgen(constructor)]
    pub fn new(axes: &[u32], bit_depth: u32) -> Result<GteOp, JsValue> {
        let shape = make_shape(axes, bit_depth).map_err(js_error)?;
        let inner = GteComparator::new(&shape).map_err(js_error)?;
        Ok(GteOp { inner })
    }

    /// Compare two boards. Fails if `check_guard_bit` is set and either
    /// board uses a lane's top bit.
    pub fn compare(&self, a: &[u32], b: &[u32], check_guard_bit: bool) -> Result<Vec<u32>, JsValue> {
        let opts = CompareOpts { check_guard_bit };
        let result = self
            .inner
            .compare_with(&words_to_board(a), &words_to_board(b), opts)
            .map_err(js_error)?;
        Ok(board_to_words(&result))
    }

    /// Repack a comparison result as one bit per cell.
    pub fn to_boolean(&self, words: &[u32]) -> Vec<u32> {
        board_to_words(&self.inner.to_boolean(&words_to_board(words)))
    }
}

/// Build a board from the outer product of per-axis sequences.
///
/// Each element of `sequences` is a `Uint32Array`.
#[wasm_bindgen]
pub fn product_board(sequences: js_sys::Array, bit_depth: u32) -> Vec<u32> {
    let sequences: Vec<Vec<u64>> = sequences
        .iter()
        .map(|seq| {
            js_sys::Uint32Array::new(&seq)
                .to_vec()
                .into_iter()
                .map(u64::from)
                .collect()
        })
        .collect();
    let depth = (bit_depth != 0).then_some(bit_depth as usize);
    board_to_words(&product(&sequences, depth))
}

/// Render a 2D board (or a 3D boolean board) as text.
#[wasm_bindgen]
pub fn render_board(words: &[u32], axes: &[u32], bit_depth: u32) -> Result<String, JsValue> {
    let shape = make_shape(axes, bit_depth).map_err(js_error)?;
    render(&shape, &words_to_board(words)).map_err(js_error)
}

// Logging support

thread_local! {
    static LOG_ENABLED: std::cell::Cell<bool> = std::cell::Cell::new(false);
}

/// Enable or disable console logging.
#[wasm_bindgen]
pub fn set_log_enabled(enabled: bool) {
    LOG_ENABLED.with(|flag| flag.set(enabled));
}

fn log(message: &str) {
    if LOG_ENABLED.with(|enabled| enabled.get()) {
        web_sys::console::log_1(&message.into());
    }
}

/// Get the version of the bitboard library.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! Problem context
//!
//! A [`Context`] fixes the variable count of a boolean cube problem and
//! owns the resources every operation shares: the four constant global
//! cubes, the scope-stack arena for temporary cubes, and the variable
//! name table used by the expression front-end.
//!
//! A context is not shared between threads. Each thread builds its own,
//! and a [`List`] is owned by exactly one thread at a time. All
//! list-level algorithms are implemented as `impl Context` blocks spread
//! over the per-concern modules of this crate.

use crate::cube::{self, Block, VARS_PER_BLOCK, ZERO_MASK};
use crate::error::CapacityError;
use crate::expr::NameTable;
use crate::list::List;

/// Upper bound on nested scope frames.
pub const MAX_SCOPE_DEPTH: usize = 500;

/// Fixed slots of the constant global cubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalCube {
    /// Every field `00`.
    Illegal = 0,
    /// Every field `01`.
    Zero = 1,
    /// Every field `10`.
    One = 2,
    /// Every field `11`, the universal cube.
    Universal = 3,
}

/// Shared state for all cubes and lists of one problem.
#[derive(Debug)]
pub struct Context {
    var_cnt: usize,
    blk_cnt: usize,
    globals: List,
    stack: List,
    frames: Vec<usize>,
    names: NameTable,
}

impl Context {
    /// Create a context for `var_cnt` boolean variables.
    pub fn new(var_cnt: usize) -> Self {
        let blk_cnt = var_cnt.div_ceil(VARS_PER_BLOCK);
        let mut globals = List::new(blk_cnt);
        for fill in [0, ZERO_MASK, ZERO_MASK << 1, !0] {
            let pos = globals.add_cube().expect("global cube allocation");
            globals.cube_mut(pos).fill(fill);
        }
        Context {
            var_cnt,
            blk_cnt,
            globals,
            stack: List::new(blk_cnt),
            frames: Vec::new(),
            names: NameTable::default(),
        }
    }

    /// Number of variables per cube.
    pub fn var_cnt(&self) -> usize {
        self.var_cnt
    }

    /// Number of blocks per cube.
    pub fn blk_cnt(&self) -> usize {
        self.blk_cnt
    }

    /// Create an empty list shaped for this context.
    pub fn new_list(&self) -> List {
        List::new(self.blk_cnt)
    }

    /// Borrow one of the constant global cubes.
    pub fn global_cube(&self, which: GlobalCube) -> &[Block] {
        self.globals.cube(which as usize)
    }

    /// Copy a global cube into `r`.
    pub fn copy_global_cube(&self, r: &mut [Block], which: GlobalCube) {
        cube::copy(r, self.global_cube(which));
    }

    /// Variable name table of the expression front-end.
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Mutable access to the variable name table.
    pub fn names_mut(&mut self) -> &mut NameTable {
        &mut self.names
    }

    /// Open a scope frame for [`Context::temp_cube`].
    ///
    /// Frames nest LIFO. Exceeding [`MAX_SCOPE_DEPTH`] is a programming
    /// error and aborts.
    pub fn start_frame(&mut self) {
        assert!(self.frames.len() < MAX_SCOPE_DEPTH, "scope overflow");
        self.frames.push(self.stack.len());
    }

    /// Close the innermost scope frame, invalidating every temporary
    /// cube handed out since the matching [`Context::start_frame`].
    ///
    /// Calling this at depth zero is a programming error and aborts.
    pub fn end_frame(&mut self) {
        let pos = self.frames.pop().expect("scope underflow");
        self.stack.truncate(pos);
    }

    /// Current scope nesting depth.
    pub fn scope_depth(&self) -> usize {
        self.frames.len()
    }

    /// Append a don't-care temporary cube to the current frame and
    /// return its handle. Valid until the frame ends.
    pub fn temp_cube(&mut self) -> Result<usize, CapacityError> {
        assert!(!self.frames.is_empty(), "temp cube outside of a scope frame");
        self.stack.add_cube()
    }

    /// Borrow a temporary cube by its handle.
    pub fn stack_cube(&self, handle: usize) -> &[Block] {
        self.stack.cube(handle)
    }

    /// Mutably borrow a temporary cube by its handle.
    pub fn stack_cube_mut(&mut self, handle: usize) -> &mut [Block] {
        self.stack.cube_mut(handle)
    }

    /// Render a cube in the textual form, one character per variable.
    pub fn cube_string(&self, c: &[Block]) -> String {
        (0..self.var_cnt)
            .map(|var| cube::get_var(c, var).to_char())
            .collect()
    }

    /// Fill a cube from the textual form. See
    /// [`cube::Field::from_char`] for the alphabet.
    pub fn set_cube_by_string(&self, c: &mut [Block], s: &str) {
        let mut it = s.chars().peekable();
        cube::set_cube_from_chars(self.var_cnt, c, &mut it);
    }

    /// Append cubes given as text, one cube per line.
    ///
    /// Leading blank lines and surrounding whitespace are skipped. On
    /// allocation failure the cubes appended so far remain.
    pub fn add_cubes_from_string(&self, l: &mut List, s: &str) -> Result<(), CapacityError> {
        let mut it = s.chars().peekable();
        loop {
            while matches!(it.peek(), Some(&ch) if (ch as u32) <= 32) {
                it.next();
            }
            if it.peek().is_none() {
                return Ok(());
            }
            let pos = l.add_cube()?;
            cube::set_cube_from_chars(self.var_cnt, l.cube_mut(pos), &mut it);
        }
    }

    /// One textual line per cube, in list order.
    pub fn list_strings(&self, l: &List) -> Vec<String> {
        (0..l.len()).map(|i| self.cube_string(l.cube(i))).collect()
    }

    /// Print a list to stdout, one row per cube with its index and flag
    /// byte. Debug aid, also backing the driver `show` command.
    pub fn show_list(&self, l: &List) {
        for i in 0..l.len() {
            println!("{:04} {:02x} {}", i, l.flag(i), self.cube_string(l.cube(i)));
        }
    }

    /// Literal counts per cube, `-1` for deleted entries. Containment
    /// uses this to prune subset tests.
    pub fn var_cnt_list(&self, l: &List) -> Vec<i32> {
        (0..l.len())
            .map(|i| {
                if l.is_deleted(i) {
                    -1
                } else {
                    cube::variable_count(l.cube(i)) as i32
                }
            })
            .collect()
    }
}

/// Width of the first cube line of `s`: the number of non-whitespace
/// characters before the first line terminator. Used to size a context
/// from textual input.
pub fn get_var_cnt_from_string(s: &str) -> usize {
    let mut cnt = 0;
    for ch in s.chars() {
        match ch {
            ' ' | '\t' => {}
            '\0' | '\r' | '\n' => break,
            _ => cnt += 1,
        }
    }
    cnt
}

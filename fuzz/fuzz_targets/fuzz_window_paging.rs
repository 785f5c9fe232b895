#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqdeck_paging::WindowPaginator;

#[derive(Debug, Arbitrary)]
enum Op {
    Advance,
    Retreat,
    Reset(u16),
    Toggle(u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    len: u16,
    window_size: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let Ok(mut window) = WindowPaginator::new(usize::from(input.len), usize::from(input.window_size))
    else {
        assert_eq!(input.window_size, 0);
        return;
    };

    for op in input.ops.iter().take(512) {
        match op {
            Op::Advance => {
                window.advance();
            }
            Op::Retreat => {
                window.retreat();
            }
            Op::Reset(len) => window.reset(usize::from(*len)),
            Op::Toggle(index) => {
                window.toggle(usize::from(*index));
            }
        }

        // The window always renders exactly window_size slots.
        assert_eq!(
            window.visible_range().len() + window.overflow_padding(),
            window.window_size()
        );
        assert!(window.cursor() <= window.len());
    }
});

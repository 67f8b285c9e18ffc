#![no_std]
#![no_main]

extern crate alloc;

use metron_core::{Conversion, Quantity, Rate};

enum Meters {}
enum Seconds {}

const KILOMETER: Conversion = Conversion::linear(1e3);
const HOUR: Conversion = Conversion::linear(3600.0);

#[panic_handler]
fn panic(_panic: &core::panic::PanicInfo<'_>) -> ! {
    loop {}
}

#[unsafe(no_mangle)]
fn main() {
    let distance: Quantity<f32, Meters> = KILOMETER.quantity(42.195);
    let time: Quantity<f32, Seconds> = HOUR.quantity(2.0);
    let pace: Rate<f32, Meters, Seconds> = distance.per(time);
    let mut splits = [pace.at(time / 4.0), pace.at(time / 2.0), distance];
    metron_core::sort(&mut splits);
    let _ = splits[0].clamp(Quantity::zero(), distance).try_round::<u32>();
    let _ = Quantity::<f32, Meters>::new(1.5).squared().sqrt();
}

use alloc::alloc::*;

#[derive(Default)]
pub struct Allocator;

unsafe impl GlobalAlloc for Allocator {
    unsafe fn alloc(&self, _layout: Layout) -> *mut u8 {
        unimplemented!()
    }
    unsafe fn dealloc(&self, _ptr: *mut u8, _layout: Layout) {
        unimplemented!()
    }
}

#[global_allocator]
static GLOBAL_ALLOCATOR: Allocator = Allocator;

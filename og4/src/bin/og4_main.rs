#![no_std]
#![no_main]

use defmt::info;
use rp2040_hal::clocks::init_clocks_and_plls;
use rp2040_hal::{entry, pac, Sio, Timer, Watchdog};
use rp_pico::XOSC_CRYSTAL_FREQ;

use dekatron::{Dekatron, Spinner, StatusLed};
use og4::bsp::config::{REVERT_GUIDES, STATUS_LEDS_ACTIVE_LOW};
use og4::{dekatron_g1, dekatron_g2, dekatron_k0, led_homing_error, led_pulse, led_set_error};

#[entry]
fn main() -> ! {
    info!("Program start");
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let sio = Sio::new(pac.SIO);

    let clocks = init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Busy-waits for both the guide pulses and the sweep dwell.
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let pins = rp2040_hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let g1 = dekatron_g1!(pins).into_push_pull_output().into_dyn_pin();
    let g2 = dekatron_g2!(pins).into_push_pull_output().into_dyn_pin();
    let (g1, g2) = if REVERT_GUIDES { (g2, g1) } else { (g1, g2) };
    let k0 = dekatron_k0!(pins).into_pull_down_input();

    let dekatron = Dekatron::new(g1, g2, k0, timer).unwrap();

    let pulse_led = StatusLed::new(led_pulse!(pins).into_push_pull_output(), false).unwrap();
    let homing_error_led =
        StatusLed::new(led_homing_error!(pins).into_push_pull_output(), STATUS_LEDS_ACTIVE_LOW)
            .unwrap();
    let set_error_led =
        StatusLed::new(led_set_error!(pins).into_push_pull_output(), STATUS_LEDS_ACTIVE_LOW)
            .unwrap();

    info!("OG-4 wired, starting spinner");
    Spinner::new(dekatron, pulse_led, homing_error_led, set_error_led, timer).run()
}

// Raspberry Pi Pico carrier for one OG-4. The mbed LPC1768 names of the reference
// wiring are kept next to each pin.
use crate::define_pins;

define_pins! {
    // guide electrodes, idle low
    dekatron_g1, gpio22, // p22
    dekatron_g2, gpio21, // p21
    // K0 through the cathode-0 sense resistor, pulled down
    dekatron_k0, gpio20, // p23

    // status LEDs
    led_pulse, gpio25,         // LED1, onboard
    led_homing_error, gpio14,  // LED2
    led_set_error, gpio15,     // LED3
}

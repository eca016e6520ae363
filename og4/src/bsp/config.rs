macro_rules! config {
    (
        $(
            $key:ident : $value:expr
        ),+ $(,)?
    ) => {
        $(
            pub const $key: bool = $value;
        )+
    };
}

config! {
    // 是否需要交换G1/G2 (socket wired mirrored, the glow would run backwards)
    REVERT_GUIDES: false,
    // LED2/LED3 sink current into the GPIO
    STATUS_LEDS_ACTIVE_LOW: false,
}

pub mod boards {
    //! Starting layouts for an 11-wide board, in the format read by
    //! [`crate::parse_layout`].

    /// The standard opening: 16 attackers, 8 defenders and the king. Identical to
    /// [`crate::config::standard_layout`] at width 11.
    pub const STANDARD: &str =
        "4ttt4/5t5/11/5T5/t4T4t/tt1TTKTT1tt/t4T4t/5T5/11/5t5/4ttt4";

    /// The fuller opening with 24 attackers, 12 defenders and the king.
    pub const CLASSIC: &str =
        "3ttttt3/5t5/11/t4T4t/t3TTT3t/tt1TTKTT1tt/t3TTT3t/t4T4t/11/5t5/3ttttt3";
}

/// All user-facing strings for the wallet client.
///
/// Fields are grouped by area: wallet card, modals, language selector,
/// transaction history, referral stats, clipboard feedback, and startup.
pub struct Translations {
    // --- Wallet card ---
    pub wallet_title: &'static str,
    pub wallet_balance_label: &'static str,
    pub wallet_address_label: &'static str,
    pub wallet_copy_address: &'static str,

    // --- Modals ---
    pub modal_confirm: &'static str,
    pub modal_cancel: &'static str,
    pub modal_close: &'static str,

    // --- Language selector ---
    pub language_selector_title: &'static str,

    // --- Transaction history ---
    pub tx_history_title: &'static str,
    pub tx_history_empty: &'static str,
    pub tx_status_pending: &'static str,
    pub tx_status_confirmed: &'static str,
    pub tx_status_failed: &'static str,

    // --- Referral stats ---
    pub referral_title: &'static str,
    pub referral_invited_label: &'static str,
    pub referral_rewards_label: &'static str,
    pub referral_copy_link: &'static str,

    // --- Clipboard ---
    pub clipboard_copied: &'static str,
    pub clipboard_failed: &'static str,

    // --- Startup ---
    /// Format string — use `{}` as placeholder for the language display name.
    pub language_applied: &'static str,
}

impl Translations {
    /// Every string keyed by field name, in declaration order.
    pub fn entries(&self) -> [(&'static str, &'static str); 20] {
        [
            ("wallet_title", self.wallet_title),
            ("wallet_balance_label", self.wallet_balance_label),
            ("wallet_address_label", self.wallet_address_label),
            ("wallet_copy_address", self.wallet_copy_address),
            ("modal_confirm", self.modal_confirm),
            ("modal_cancel", self.modal_cancel),
            ("modal_close", self.modal_close),
            ("language_selector_title", self.language_selector_title),
            ("tx_history_title", self.tx_history_title),
            ("tx_history_empty", self.tx_history_empty),
            ("tx_status_pending", self.tx_status_pending),
            ("tx_status_confirmed", self.tx_status_confirmed),
            ("tx_status_failed", self.tx_status_failed),
            ("referral_title", self.referral_title),
            ("referral_invited_label", self.referral_invited_label),
            ("referral_rewards_label", self.referral_rewards_label),
            ("referral_copy_link", self.referral_copy_link),
            ("clipboard_copied", self.clipboard_copied),
            ("clipboard_failed", self.clipboard_failed),
            ("language_applied", self.language_applied),
        ]
    }

    /// Returns `true` when every string in the table is non-empty.
    pub fn all_non_empty(&self) -> bool {
        self.entries().iter().all(|(_, s)| !s.is_empty())
    }
}

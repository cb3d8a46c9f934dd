use super::translations::Translations;

static EN: Translations = Translations {
    // --- Wallet card ---
    wallet_title: "My Wallet",
    wallet_balance_label: "Balance",
    wallet_address_label: "Address",
    wallet_copy_address: "Copy Address",

    // --- Modals ---
    modal_confirm: "Confirm",
    modal_cancel: "Cancel",
    modal_close: "Close",

    // --- Language selector ---
    language_selector_title: "Language",

    // --- Transaction history ---
    tx_history_title: "Transaction History",
    tx_history_empty: "No transactions yet",
    tx_status_pending: "Pending",
    tx_status_confirmed: "Confirmed",
    tx_status_failed: "Failed",

    // --- Referral stats ---
    referral_title: "Referrals",
    referral_invited_label: "Invited Friends",
    referral_rewards_label: "Rewards Earned",
    referral_copy_link: "Copy Invite Link",

    // --- Clipboard ---
    clipboard_copied: "Copied to clipboard",
    clipboard_failed: "Could not access the clipboard",

    // --- Startup ---
    language_applied: "Language set to {}",
};

pub fn translations() -> &'static Translations {
    &EN
}

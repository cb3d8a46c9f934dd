use super::translations::Translations;

static JA: Translations = Translations {
    // --- Wallet card ---
    wallet_title: "マイウォレット",
    wallet_balance_label: "残高",
    wallet_address_label: "アドレス",
    wallet_copy_address: "アドレスをコピー",

    // --- Modals ---
    modal_confirm: "確認",
    modal_cancel: "キャンセル",
    modal_close: "閉じる",

    // --- Language selector ---
    language_selector_title: "言語",

    // --- Transaction history ---
    tx_history_title: "取引履歴",
    tx_history_empty: "取引はまだありません",
    tx_status_pending: "保留中",
    tx_status_confirmed: "承認済み",
    tx_status_failed: "失敗",

    // --- Referral stats ---
    referral_title: "紹介",
    referral_invited_label: "招待した友達",
    referral_rewards_label: "獲得報酬",
    referral_copy_link: "招待リンクをコピー",

    // --- Clipboard ---
    clipboard_copied: "クリップボードにコピーしました",
    clipboard_failed: "クリップボードにアクセスできません",

    // --- Startup ---
    language_applied: "言語を{}に設定しました",
};

pub fn translations() -> &'static Translations {
    &JA
}

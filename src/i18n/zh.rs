use super::translations::Translations;

static ZH: Translations = Translations {
    // --- Wallet card ---
    wallet_title: "我的钱包",
    wallet_balance_label: "余额",
    wallet_address_label: "地址",
    wallet_copy_address: "复制地址",

    // --- Modals ---
    modal_confirm: "确认",
    modal_cancel: "取消",
    modal_close: "关闭",

    // --- Language selector ---
    language_selector_title: "语言",

    // --- Transaction history ---
    tx_history_title: "交易记录",
    tx_history_empty: "暂无交易",
    tx_status_pending: "处理中",
    tx_status_confirmed: "已确认",
    tx_status_failed: "失败",

    // --- Referral stats ---
    referral_title: "邀请",
    referral_invited_label: "已邀请好友",
    referral_rewards_label: "已获奖励",
    referral_copy_link: "复制邀请链接",

    // --- Clipboard ---
    clipboard_copied: "已复制到剪贴板",
    clipboard_failed: "无法访问剪贴板",

    // --- Startup ---
    language_applied: "语言已设置为 {}",
};

pub fn translations() -> &'static Translations {
    &ZH
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transaction building.
//!
//! One pure function per ledger action, mapping normalised parameters
//! onto the operation structs of `hak-core`. Builders never touch the
//! network. Schedulable builders finish through
//! [`maybe_wrap_in_schedule`]; the rest return a plain transaction.

use hak_core::{
    Operation, ScheduleCreateSpec, Transaction, TransactionBody, TransferTransaction,
};

use crate::schemas::{
    ApproveHbarAllowanceNormalised, ApproveNftAllowanceNormalised,
    ApproveTokenAllowanceNormalised, AssociateTokenNormalised, ContractExecuteNormalised,
    CreateAccountNormalised, CreateTokenNormalised, CreateTopicNormalised,
    DeleteAccountNormalised, DeleteScheduleNormalised, DeleteTokenNormalised,
    DeleteTopicNormalised, DissociateTokenNormalised, MintFungibleTokenNormalised,
    MintNonFungibleTokenNormalised, SignScheduleNormalised, SubmitTopicMessageNormalised,
    TransferFungibleTokenNormalised, TransferFungibleTokenWithAllowanceNormalised,
    TransferHbarNormalised, TransferHbarWithAllowanceNormalised, TransferNftWithAllowanceNormalised,
    UpdateAccountNormalised, UpdateTokenNormalised, UpdateTopicNormalised,
};

/// Wrap a body in a schedule-create when a spec is present.
///
/// Pure construction: the inner body is embedded unchanged, and a `None`
/// spec returns the plain transaction.
pub fn maybe_wrap_in_schedule(
    body: TransactionBody,
    scheduling_params: Option<ScheduleCreateSpec>,
) -> Transaction {
    match scheduling_params {
        Some(spec) => Transaction::Scheduled { spec, inner: body },
        None => Transaction::Plain(body),
    }
}

fn body_with_memo(operation: Operation, memo: Option<String>) -> TransactionBody {
    let mut body = TransactionBody::new(operation);
    if let Some(memo) = memo {
        body.set_transaction_memo(memo);
    }
    body
}

/// Build an HBAR transfer, one line per ledger entry.
pub fn transfer_hbar(params: TransferHbarNormalised) -> Transaction {
    let mut tx = TransferTransaction::default();
    for (account_id, tinybars) in params.hbar_transfers {
        tx.add_hbar_transfer(account_id, tinybars);
    }
    let body = body_with_memo(Operation::Transfer(tx), params.transaction_memo);
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build an allowance-backed HBAR transfer.
pub fn transfer_hbar_with_allowance(params: TransferHbarWithAllowanceNormalised) -> Transaction {
    let mut tx = TransferTransaction::default();
    for (account_id, tinybars) in params.hbar_approved_transfers {
        tx.add_approved_hbar_transfer(account_id, tinybars);
    }
    Transaction::Plain(body_with_memo(
        Operation::Transfer(tx),
        params.transaction_memo,
    ))
}

/// Build a fungible-token transfer, one line per (token, account) pair.
pub fn transfer_fungible_token(params: TransferFungibleTokenNormalised) -> Transaction {
    let mut tx = TransferTransaction::default();
    for (token_id, ledger) in params.ft_transfers {
        for (account_id, amount) in ledger {
            tx.add_token_transfer(token_id, account_id, amount);
        }
    }
    let body = body_with_memo(Operation::Transfer(tx), params.transaction_memo);
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build an allowance-backed fungible-token transfer.
pub fn transfer_fungible_token_with_allowance(
    params: TransferFungibleTokenWithAllowanceNormalised,
) -> Transaction {
    let mut tx = TransferTransaction::default();
    for (token_id, ledger) in params.ft_approved_transfers {
        for (account_id, amount) in ledger {
            tx.add_approved_token_transfer(token_id, account_id, amount);
        }
    }
    let body = body_with_memo(Operation::Transfer(tx), params.transaction_memo);
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build an allowance-backed NFT transfer.
pub fn transfer_nft_with_allowance(params: TransferNftWithAllowanceNormalised) -> Transaction {
    let mut tx = TransferTransaction::default();
    for (token_id, movements) in params.nft_approved_transfers {
        for movement in movements {
            tx.add_nft_transfer(token_id, movement);
        }
    }
    let body = body_with_memo(Operation::Transfer(tx), params.transaction_memo);
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build an account-create transaction.
pub fn create_account(params: CreateAccountNormalised) -> Transaction {
    let body = TransactionBody::new(Operation::AccountCreate {
        key: params.key,
        initial_balance: params.initial_balance,
        memo: params.memo,
        max_automatic_token_associations: params.max_automatic_token_associations,
    });
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build an account-update transaction.
pub fn update_account(params: UpdateAccountNormalised) -> Transaction {
    let body = TransactionBody::new(Operation::AccountUpdate {
        account_id: params.account_id,
        account_memo: params.account_memo,
    });
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build an account-delete transaction.
pub fn delete_account(params: DeleteAccountNormalised) -> Transaction {
    Transaction::Plain(TransactionBody::new(Operation::AccountDelete {
        account_id: params.account_id,
        transfer_account_id: params.transfer_account_id,
    }))
}

/// Build an HBAR allowance approval.
pub fn approve_hbar_allowance(params: ApproveHbarAllowanceNormalised) -> Transaction {
    Transaction::Plain(body_with_memo(
        Operation::AccountAllowanceApprove {
            hbar_allowances: params.hbar_allowances,
            token_allowances: Vec::new(),
            nft_allowances: Vec::new(),
        },
        params.transaction_memo,
    ))
}

/// Build a fungible-token allowance approval.
pub fn approve_token_allowance(params: ApproveTokenAllowanceNormalised) -> Transaction {
    Transaction::Plain(body_with_memo(
        Operation::AccountAllowanceApprove {
            hbar_allowances: Vec::new(),
            token_allowances: params.token_allowances,
            nft_allowances: Vec::new(),
        },
        params.transaction_memo,
    ))
}

/// Build an NFT allowance approval.
pub fn approve_nft_allowance(params: ApproveNftAllowanceNormalised) -> Transaction {
    Transaction::Plain(body_with_memo(
        Operation::AccountAllowanceApprove {
            hbar_allowances: Vec::new(),
            token_allowances: Vec::new(),
            nft_allowances: params.nft_allowances,
        },
        params.transaction_memo,
    ))
}

/// Build a token-create transaction for a fungible token.
pub fn create_fungible_token(params: CreateTokenNormalised) -> Transaction {
    let body = TransactionBody::new(Operation::TokenCreate {
        token_params: params.token_params,
        keys: params.keys,
    });
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build a token-create transaction for an NFT class.
pub fn create_non_fungible_token(params: CreateTokenNormalised) -> Transaction {
    create_fungible_token(params)
}

/// Build a fungible mint transaction.
pub fn mint_fungible_token(params: MintFungibleTokenNormalised) -> Transaction {
    let body = TransactionBody::new(Operation::TokenMint {
        token_id: params.token_id,
        amount: Some(params.amount),
        metadata: Vec::new(),
    });
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build an NFT mint transaction.
pub fn mint_non_fungible_token(params: MintNonFungibleTokenNormalised) -> Transaction {
    let body = TransactionBody::new(Operation::TokenMint {
        token_id: params.token_id,
        amount: None,
        metadata: params.metadata,
    });
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build a token-associate transaction.
pub fn associate_token(params: AssociateTokenNormalised) -> Transaction {
    let body = TransactionBody::new(Operation::TokenAssociate {
        account_id: params.account_id,
        token_ids: params.token_ids,
    });
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build a token-dissociate transaction.
pub fn dissociate_token(params: DissociateTokenNormalised) -> Transaction {
    let body = body_with_memo(
        Operation::TokenDissociate {
            account_id: params.account_id,
            token_ids: params.token_ids,
        },
        params.transaction_memo,
    );
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build a token-update transaction.
pub fn update_token(params: UpdateTokenNormalised) -> Transaction {
    Transaction::Plain(TransactionBody::new(Operation::TokenUpdate {
        token_id: params.token_id,
        token_name: params.token_name,
        token_symbol: params.token_symbol,
        token_memo: params.token_memo,
        metadata: params.metadata,
        treasury_account_id: params.treasury_account_id,
        auto_renew_account_id: params.auto_renew_account_id,
        keys: params.token_keys,
    }))
}

/// Build a token-delete transaction.
pub fn delete_token(params: DeleteTokenNormalised) -> Transaction {
    Transaction::Plain(TransactionBody::new(Operation::TokenDelete {
        token_id: params.token_id,
    }))
}

/// Build a topic-create transaction.
pub fn create_topic(params: CreateTopicNormalised) -> Transaction {
    Transaction::Plain(body_with_memo(
        Operation::TopicCreate {
            memo: params.memo,
            admin_key: params.admin_key,
            submit_key: params.submit_key,
        },
        params.transaction_memo,
    ))
}

/// Build a topic-update transaction.
pub fn update_topic(params: UpdateTopicNormalised) -> Transaction {
    Transaction::Plain(TransactionBody::new(Operation::TopicUpdate {
        topic_id: params.topic_id,
        memo: params.memo,
        admin_key: params.admin_key,
        submit_key: params.submit_key,
        auto_renew_account_id: params.auto_renew_account_id,
        auto_renew_period: params.auto_renew_period,
        expiration_time: params.expiration_time,
    }))
}

/// Build a topic-delete transaction.
pub fn delete_topic(params: DeleteTopicNormalised) -> Transaction {
    Transaction::Plain(TransactionBody::new(Operation::TopicDelete {
        topic_id: params.topic_id,
    }))
}

/// Build a topic message submission.
pub fn submit_topic_message(params: SubmitTopicMessageNormalised) -> Transaction {
    let body = body_with_memo(
        Operation::TopicMessageSubmit {
            topic_id: params.topic_id,
            message: params.message,
        },
        params.transaction_memo,
    );
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build a contract-execute transaction.
pub fn execute_contract(params: ContractExecuteNormalised) -> Transaction {
    let body = TransactionBody::new(Operation::ContractExecute {
        contract_id: params.contract_id,
        gas: params.gas,
        function_parameters: params.function_parameters,
    });
    maybe_wrap_in_schedule(body, params.scheduling_params)
}

/// Build a schedule-sign transaction.
pub fn sign_schedule(params: SignScheduleNormalised) -> Transaction {
    Transaction::Plain(TransactionBody::new(Operation::ScheduleSign {
        schedule_id: params.schedule_id,
    }))
}

/// Build a schedule-delete transaction.
pub fn delete_schedule(params: DeleteScheduleNormalised) -> Transaction {
    Transaction::Plain(TransactionBody::new(Operation::ScheduleDelete {
        schedule_id: params.schedule_id,
    }))
}

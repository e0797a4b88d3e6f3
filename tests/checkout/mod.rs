mod checkout_new_branch_forks_history;

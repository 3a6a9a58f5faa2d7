//! Solidity interface declarations for the factory and per-event ticket contracts.
//!
//! These are the only two remote interfaces the dashboard talks to. The
//! declarations mirror the deployed ABIs; parameter names are kept where the
//! ABI names them and chosen descriptively where the ABI leaves them blank
//! (public mapping getters). Names never affect encoding.

#![allow(missing_docs, clippy::too_many_arguments, clippy::pub_underscore_fields)]

use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    contract TicketFactory {
        event ContractDeployed(address contractAddress, address owner, string name);

        function contractNames(address contractAddress) external view returns (string);
        function contractOwners(address contractAddress) external view returns (address);
        function deployContract(string name, string symbol, string eventName) external;
        function deployedContracts(uint256 index) external view returns (address);
        function getContractsByOwner(address owner) external view returns (address[]);
        function getDeployedContract(uint256 index) external view returns (address);
        function getDeployedContracts() external view returns (address[]);
        function getTotalContracts() external view returns (uint256);
    }
}

sol! {
    #[derive(Debug, PartialEq, Eq)]
    contract EventTicket {
        constructor(string name, string symbol, string _eventName, address _owner);

        error ERC721IncorrectOwner(address sender, uint256 tokenId, address owner);
        error ERC721InsufficientApproval(address operator, uint256 tokenId);
        error ERC721InvalidApprover(address approver);
        error ERC721InvalidOperator(address operator);
        error ERC721InvalidOwner(address owner);
        error ERC721InvalidReceiver(address receiver);
        error ERC721InvalidSender(address sender);
        error ERC721NonexistentToken(uint256 tokenId);
        error OwnableInvalidOwner(address owner);
        error OwnableUnauthorizedAccount(address account);

        event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId);
        event ApprovalForAll(address indexed owner, address indexed operator, bool approved);
        event BatchMetadataUpdate(uint256 _fromTokenId, uint256 _toTokenId);
        event MetadataUpdate(uint256 _tokenId);
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
        event SaleStatusChanged(bool isActive);
        event TicketMinted(uint256 indexed tokenId, address indexed buyer, uint256 price);
        event TicketUsed(uint256 indexed tokenId, address indexed user);
        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);

        function approve(address to, uint256 tokenId) external;
        function balanceOf(address owner) external view returns (uint256);
        function eventName() external view returns (string);
        function getApproved(uint256 tokenId) external view returns (address);
        function getContractBalance() external view returns (uint256);
        function getCurrentTokenId() external view returns (uint256);
        function getTicketInfo(uint256 tokenId) external view returns (
            bool isUsed,
            uint256 purchaseTime,
            address originalOwner,
            address currentOwner
        );
        function getTokensByOwner(address owner) external view returns (uint256[]);
        function getTotalSupply() external view returns (uint256);
        function isApprovedForAll(address owner, address operator) external view returns (bool);
        function isTicketValid(uint256 tokenId) external view returns (bool);
        function maxSupply() external view returns (uint256);
        function mintTicket(string tokenURI) external payable returns (uint256);
        function name() external view returns (string);
        function owner() external view returns (address);
        function ownerMintTicket(address to, string tokenURI) external returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
        function renounceOwnership() external;
        function safeTransferFrom(address from, address to, uint256 tokenId) external;
        function safeTransferFrom(address from, address to, uint256 tokenId, bytes data) external;
        function saleActive() external view returns (bool);
        function setApprovalForAll(address operator, bool approved) external;
        function setMaxSupply(uint256 _maxSupply) external;
        function setTicketPrice(uint256 _price) external;
        function supportsInterface(bytes4 interfaceId) external view returns (bool);
        function symbol() external view returns (string);
        function ticketDetails(uint256 tokenId) external view returns (
            bool isUsed,
            uint256 purchaseTime,
            address originalOwner
        );
        function ticketPrice() external view returns (uint256);
        function toggleSale() external;
        function tokenURI(uint256 tokenId) external view returns (string);
        function transferFrom(address from, address to, uint256 tokenId) external;
        function transferOwnership(address newOwner) external;
        function useTicket(uint256 tokenId) external;
        function withdrawFunds() external;
    }
}
